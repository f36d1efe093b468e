//! 商城前端页面
//!
//! 购物车只存在于浏览器页面中，刷新即清空。

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Simple E-commerce Store</title>
  <style>
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      max-width: 1000px;
      margin: 30px auto;
      background: #f8f9fa;
      padding: 20px;
    }
    h1 { text-align: center; color: #2c3e50; }
    #add-product-form, #cart {
      background: white;
      padding: 20px;
      border-radius: 8px;
      box-shadow: 0 0 8px #ccc;
    }
    #add-product-form { margin-bottom: 30px; }
    #add-product-form input, #add-product-form textarea {
      width: 100%;
      padding: 10px;
      margin-bottom: 10px;
      border-radius: 5px;
      border: 1px solid #ccc;
      font-size: 1rem;
      box-sizing: border-box;
    }
    #add-product-form button, #checkout-btn {
      background: #28a745;
      border: none;
      color: white;
      font-weight: bold;
      border-radius: 5px;
      cursor: pointer;
    }
    #add-product-form button { padding: 10px 20px; }
    #products { display: flex; flex-wrap: wrap; gap: 15px; justify-content: center; }
    .product-card {
      background: white;
      width: 220px;
      border-radius: 8px;
      box-shadow: 0 0 8px #ccc;
      padding: 10px;
      display: flex;
      flex-direction: column;
      align-items: center;
    }
    .product-card img {
      max-width: 180px;
      max-height: 180px;
      object-fit: contain;
      border-radius: 6px;
      margin-bottom: 10px;
    }
    .product-card h3 { margin: 0 0 5px 0; color: #333; text-align: center; }
    .product-card p { font-size: 0.9rem; color: #555; text-align: center; min-height: 40px; }
    .product-card .price { margin: 10px 0; font-weight: bold; color: #e67e22; font-size: 1.2rem; }
    .product-card button {
      background: #007bff;
      border: none;
      color: white;
      padding: 8px 12px;
      border-radius: 5px;
      cursor: pointer;
      font-weight: bold;
    }
    #cart { margin-top: 30px; }
    #cart h2 { margin-top: 0; color: #2c3e50; }
    #cart ul { list-style: none; padding: 0; }
    #cart li {
      display: flex;
      justify-content: space-between;
      padding: 8px 0;
      border-bottom: 1px solid #eee;
      align-items: center;
    }
    #cart li:last-child { border-bottom: none; }
    #cart li button {
      background: #dc3545;
      border: none;
      color: white;
      padding: 5px 10px;
      border-radius: 4px;
      cursor: pointer;
    }
    #checkout-btn { margin-top: 15px; padding: 12px 20px; width: 100%; }
    #message { text-align: center; margin-bottom: 15px; font-weight: bold; color: green; min-height: 1.2em; }
  </style>
</head>
<body>

<h1>Simple E-commerce Store</h1>

<div id="message"></div>

<section id="add-product-form">
  <h2>Add New Product (Admin)</h2>
  <form id="productForm">
    <input type="text" id="title" placeholder="Product Title" required />
    <textarea id="description" rows="3" placeholder="Product Description" required></textarea>
    <input type="number" id="price" placeholder="Price (USD)" min="0.01" step="0.01" required />
    <input type="url" id="imageUrl" placeholder="Image URL" required />
    <button type="submit">Add Product</button>
  </form>
</section>

<section>
  <h2>Products</h2>
  <div id="products"></div>
</section>

<section id="cart">
  <h2>Your Cart</h2>
  <ul id="cart-items"></ul>
  <p><strong>Total: $<span id="total-price">0.00</span></strong></p>
  <button id="checkout-btn">Checkout</button>
</section>

<script>
  const view = {
    message: document.getElementById('message'),
    products: document.getElementById('products'),
    cartItems: document.getElementById('cart-items'),
    totalPrice: document.getElementById('total-price'),
  };

  // 页面会话状态，显式传给各渲染函数
  function createSession() {
    return { cart: [] };
  }

  function cartAdd(session, product) {
    const line = session.cart.find(item => item.product.id === product.id);
    if (line) {
      line.quantity++;
    } else {
      session.cart.push({ product, quantity: 1 });
    }
  }

  function cartRemove(session, index) {
    session.cart.splice(index, 1);
  }

  function cartTotal(session) {
    return session.cart.reduce((sum, line) => sum + line.product.price * line.quantity, 0);
  }

  function showMessage(msg, isError = false) {
    view.message.textContent = msg;
    view.message.style.color = isError ? 'red' : 'green';
    if (msg) setTimeout(() => { view.message.textContent = ''; }, 3000);
  }

  async function fetchProducts(session) {
    try {
      const res = await fetch('/api/products');
      if (!res.ok) throw new Error('Failed to load products');
      renderProducts(session, await res.json());
    } catch (e) {
      showMessage(e.message, true);
    }
  }

  function renderProducts(session, products) {
    view.products.replaceChildren();
    if (products.length === 0) {
      const empty = document.createElement('p');
      empty.textContent = 'No products available.';
      view.products.appendChild(empty);
      return;
    }
    products.forEach(p => {
      const card = document.createElement('div');
      card.className = 'product-card';

      const img = document.createElement('img');
      img.src = p.imageUrl;
      img.alt = p.title;

      const title = document.createElement('h3');
      title.textContent = p.title;

      const description = document.createElement('p');
      description.textContent = p.description;

      const price = document.createElement('div');
      price.className = 'price';
      price.textContent = p.price.toFixed(2) + ' $';

      const add = document.createElement('button');
      add.textContent = 'Add to Cart';
      add.addEventListener('click', () => {
        cartAdd(session, p);
        renderCart(session);
        showMessage('Added to cart');
      });

      card.append(img, title, description, price, add);
      view.products.appendChild(card);
    });
  }

  function renderCart(session) {
    view.cartItems.replaceChildren();
    if (session.cart.length === 0) {
      const empty = document.createElement('li');
      empty.textContent = 'Your cart is empty.';
      view.cartItems.appendChild(empty);
      view.totalPrice.textContent = '0.00';
      return;
    }
    session.cart.forEach(({ product, quantity }, i) => {
      const li = document.createElement('li');

      const label = document.createElement('span');
      label.textContent = product.title + ' (x' + quantity + ')';

      const right = document.createElement('span');
      right.textContent = '$' + (product.price * quantity).toFixed(2) + ' ';
      const remove = document.createElement('button');
      remove.textContent = 'Remove';
      remove.addEventListener('click', () => {
        cartRemove(session, i);
        renderCart(session);
      });
      right.appendChild(remove);

      li.append(label, right);
      view.cartItems.appendChild(li);
    });
    view.totalPrice.textContent = cartTotal(session).toFixed(2);
  }

  function checkout(session) {
    if (session.cart.length === 0) {
      showMessage('Your cart is empty.', true);
      return;
    }
    alert('Checkout successful! Total: $' + cartTotal(session).toFixed(2));
    session.cart = [];
    renderCart(session);
  }

  async function submitProduct(session, form) {
    const title = document.getElementById('title').value.trim();
    const description = document.getElementById('description').value.trim();
    const price = parseFloat(document.getElementById('price').value);
    const imageUrl = document.getElementById('imageUrl').value.trim();
    if (!title || !description || !(price > 0) || !imageUrl) {
      showMessage('Please fill all product fields', true);
      return;
    }
    try {
      const res = await fetch('/api/products', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ title, description, price, imageUrl })
      });
      if (!res.ok) throw new Error('Failed to add product');
      showMessage('Product added successfully');
      form.reset();
      fetchProducts(session);
    } catch (err) {
      showMessage(err.message, true);
    }
  }

  const session = createSession();

  document.getElementById('checkout-btn').addEventListener('click', () => checkout(session));
  document.getElementById('productForm').addEventListener('submit', e => {
    e.preventDefault();
    submitProduct(session, e.target);
  });

  fetchProducts(session);
  renderCart(session);
</script>

</body>
</html>
"##;
